pub mod metar;

pub mod d400_energy_dashboard;
pub mod d401_analysis;
pub mod d402_forecast;

pub mod d400_energy_dashboard;
pub mod d402_forecast;

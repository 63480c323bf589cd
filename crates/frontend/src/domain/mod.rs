pub mod a001_dependencia;
pub mod a002_sector;
pub mod a003_edificio;
pub mod a004_presupuesto;

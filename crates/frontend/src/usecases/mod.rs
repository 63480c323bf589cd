pub mod u501_carga_masiva;

pub mod dto;

pub use dto::{
    AnalisisIa, AnalisisIaResponse, DataPunto, ProyeccionQuery, ProyeccionResponse,
    RangoPrecios, RecursoDependencia, RecursoEdificio, RespuestaRecursos, ResumenProyeccion,
    TipoPunto,
};

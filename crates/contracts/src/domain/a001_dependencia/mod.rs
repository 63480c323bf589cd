pub mod aggregate;

pub use aggregate::{CreateDependenciaDto, Dependencia, PatchDependenciaDto};

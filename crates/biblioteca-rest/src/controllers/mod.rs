//! REST controllers.

pub mod autores_controller;
pub mod generos_controller;
pub mod health_controller;
pub mod livros_controller;

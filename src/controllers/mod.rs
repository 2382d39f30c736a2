pub mod catalogo_controller;
pub mod empresa_controller;
pub mod mantencion_controller;
pub mod maquina_controller;
pub mod personal_controller;

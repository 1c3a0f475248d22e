// ============================================
// Каталог звуков поверхностей
// ============================================
// Data-Driven Architecture: наборы звуков загружаются из JSON

mod definition;
mod registry;

pub use definition::*;
pub use registry::*;

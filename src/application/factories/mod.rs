mod component_factory;
mod formatter_factory;

pub use component_factory::ComponentFactory;
pub use formatter_factory::FormatterFactory;

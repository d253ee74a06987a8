mod reader;

pub use reader::ExpressionSource;

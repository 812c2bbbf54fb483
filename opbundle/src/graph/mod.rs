mod types;

pub use types::{FunctionDef, FunctionLibrary, FunctionSignature, GraphDef, NodeDef};

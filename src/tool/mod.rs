// ABOUTME: Tool module - defines tools, registry, schema export, and execution.
// ABOUTME: Core abstraction for agent capabilities.

mod executor;
mod function;
mod observation;
mod parameter;
mod registry;
mod schema;
mod traits;
mod value;

pub use executor::*;
pub use function::*;
pub use observation::*;
pub use parameter::*;
pub use registry::*;
pub use schema::*;
pub use traits::*;
pub use value::*;

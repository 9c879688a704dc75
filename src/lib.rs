//! pathflow - composition, deep paths and collection helpers over JSON values
//!
//! ```
//! use pathflow::{flow, get, path, update_flow, Path};
//! use serde_json::{json, Value};
//!
//! let inc = |d: Value| json!(d.as_i64().unwrap_or(0) + 1);
//! let twice = flow!(
//!     update_flow(path!["b", "c", "d"], inc),
//!     update_flow(path!["b", "c", "d"], inc),
//! );
//!
//! let obj = twice.call(json!({"b": {"c": {"d": 1}}}));
//! assert_eq!(get(&obj, &Path::parse("b.c.d").unwrap(), json!(0)), json!(3));
//! ```

pub mod collection;
pub mod compose;
pub mod engine;
pub mod error;
pub mod path;
pub mod predicates;
pub mod util;

pub use collection::*;
pub use compose::{constant, flow_all, thread_all, Flow};
pub use engine::{
    get, get_flow, get_ref, set, set_flow, update, update_flow, update_flow_with_args,
    update_with_args,
};
pub use error::{FixSuggestion, PathError};
pub use path::{path_flow, Key, Path};
pub use predicates::{is_array, is_boolean, is_indexable, is_nil, is_number, is_object, is_string};

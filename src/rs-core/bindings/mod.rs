mod js_functions;
mod js_host;

pub use js_functions::*;
pub use js_host::JsHost;

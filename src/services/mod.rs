mod python_host;

pub use python_host::{PYTHON_ENV_VAR, PythonProcessHost};

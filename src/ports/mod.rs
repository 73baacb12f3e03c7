mod process_host;

pub use process_host::ProcessHost;


pub use mock_process_host::MockProcessHost;

mod sequential_monitor;

pub use sequential_monitor::SequentialMonitor;

/// Current connectivity state as reported by the runtime.
///
/// The core only reads the boolean; the "became online" / "became offline"
/// events live with the embedding application, which wires them to the sync
/// orchestrator's `handle_online` / `handle_offline`.
pub trait ConnectivityMonitor: Send + Sync {
    fn is_online(&self) -> bool;
}

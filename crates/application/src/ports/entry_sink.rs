use ypprobe_domain::DomainError;

/// Receives map entries as they arrive, in server order.
pub trait EntrySink: Send {
    fn emit(&mut self, key: &[u8], value: &[u8]) -> Result<(), DomainError>;
}

/// Side effects requested by the key handler and carried out by the host loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadFile { path: String },
    ExportSample,
    Quit,
}

use shared::{ExplorerKind, NetworkType};

/// stellar.expert URL for a transaction hash or account id.
///
/// `base` is the explorer root without the network segment, e.g.
/// `https://stellar.expert/explorer`.
pub fn explorer_link(base: &str, network: NetworkType, id: &str, kind: ExplorerKind) -> String {
    format!(
        "{}/{}/{}/{}",
        base.trim_end_matches('/'),
        network.explorer_segment(),
        kind.path_segment(),
        id
    )
}

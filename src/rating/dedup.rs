use crate::config::AddressMatch;
use crate::model::WifiDetail;
use std::collections::HashMap;

/// Collapse observations sharing a hardware address.
///
/// Each group keeps its strongest observation (the first one on a tie) at the
/// position where the group first appeared.
pub fn collapse_duplicates(
    details: impl IntoIterator<Item = WifiDetail>,
    address_match: AddressMatch,
) -> Vec<WifiDetail> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<WifiDetail> = Vec::new();

    for detail in details {
        let key = address_match.key(&detail.bssid);
        match positions.get(&key) {
            Some(&idx) => {
                if detail.signal.level > kept[idx].signal.level {
                    kept[idx] = detail;
                }
            }
            None => {
                positions.insert(key, kept.len());
                kept.push(detail);
            }
        }
    }

    kept
}

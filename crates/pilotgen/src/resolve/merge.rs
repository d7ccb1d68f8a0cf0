//! Ordered merge of inherited members.

use indexmap::IndexMap;

/// Fill `child` with the entries of `parent` that it does not declare.
///
/// Precedence: the child wins. Child entries keep their value and position;
/// keys present only in `parent` are appended in the parent's order.
pub fn merge_inherited<V: Clone>(child: &mut IndexMap<String, V>, parent: &IndexMap<String, V>) {
    for (key, value) in parent {
        if !child.contains_key(key) {
            child.insert(key.clone(), value.clone());
        }
    }
}

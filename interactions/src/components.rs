//! Edits over a message's component layout, independent of any network dispatch.

use model::interaction::{Component, LayoutComponent};

/// Finds the first component with the given custom id across all action rows.
pub fn find_component<'a>(layout: &'a [LayoutComponent], id: &str) -> Option<&'a Component> {
    layout
        .iter()
        .filter_map(LayoutComponent::as_action_row)
        .flat_map(|row| row.components.iter())
        .find(|component| component.id() == Some(id))
}

/// Replaces or removes the first component with the given custom id, in place.
///
/// With `Some(replacement)` the component keeps its row and position. With `None` it is removed,
/// and a row left without components is removed along with it. Layouts other than action rows
/// are passed over. Returns whether a component matched; when none does, `layout` is untouched.
pub fn edit_or_remove(layout: &mut Vec<LayoutComponent>, id: &str, replacement: Option<Component>) -> bool {
    let position = layout.iter().enumerate().find_map(|(row_idx, entry)| {
        entry
            .as_action_row()?
            .components
            .iter()
            .position(|component| component.id() == Some(id))
            .map(|idx| (row_idx, idx))
    });

    let (row_idx, idx) = match position {
        Some(position) => position,
        None => return false,
    };

    let row_empty = match layout[row_idx].as_action_row_mut() {
        Some(row) => {
            match replacement {
                Some(component) => row.components[idx] = component,
                None => {
                    row.components.remove(idx);
                }
            }
            row.is_empty()
        }
        None => false,
    };

    if row_empty {
        layout.remove(row_idx);
    }

    true
}

/// Copying variant of [`edit_or_remove`].
pub fn replace_component(
    layout: &[LayoutComponent],
    id: &str,
    replacement: Option<Component>,
) -> Vec<LayoutComponent> {
    let mut layout = layout.to_vec();
    edit_or_remove(&mut layout, id, replacement);
    layout
}

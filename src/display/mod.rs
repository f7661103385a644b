use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::*;

use crate::dispatch::each_tag;
use crate::registry::{Representation, Tag};

/// Render the representation registry as a table.
///
/// One row per tag: Rust type, algebra, signedness, native width and the
/// per-instantiation identities.
#[must_use]
pub fn registry_table() -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["Tag", "Type", "Algebra", "Signed", "Bytes", "Zero", "One"]
                .map(|h| Cell::new(h).set_alignment(CellAlignment::Center)),
        );

    for tag in Tag::ALL {
        let (zero, one) = identities(tag);
        table.add_row(vec![
            Cell::new(tag).set_alignment(CellAlignment::Left),
            Cell::new(tag.type_name()).set_alignment(CellAlignment::Left),
            Cell::new(tag.algebra()).set_alignment(CellAlignment::Left),
            Cell::new(if tag.is_signed() { "yes" } else { "no" }).set_alignment(CellAlignment::Center),
            Cell::new(tag.size()).set_alignment(CellAlignment::Right),
            Cell::new(zero).set_alignment(CellAlignment::Right),
            Cell::new(one).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

fn identities(tag: Tag) -> (String, String) {
    each_tag!(tag, N => (
        <N as Representation>::ZERO.to_string(),
        <N as Representation>::ONE.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_representation() {
        let rendered = registry_table();
        for tag in Tag::ALL {
            assert!(rendered.contains(&tag.to_string()), "missing {tag}:\n{rendered}");
        }
        assert!(rendered.contains("decimal128"));
        assert!(rendered.contains("field"));
        assert!(rendered.contains("ring"));
    }

    #[test]
    fn identities_use_native_formatting() {
        assert_eq!(identities(Tag::Int8), ("0".to_owned(), "1".to_owned()));
        assert_eq!(identities(Tag::Float64), ("0".to_owned(), "1".to_owned()));
        assert_eq!(identities(Tag::Decimal128), ("0".to_owned(), "1".to_owned()));
    }
}

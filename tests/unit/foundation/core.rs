use super::*;

#[test]
fn role_table_indexes_by_role() {
    let mut table = RoleTable::from_fn(|role| role.index() * 10);
    assert_eq!(table[PixelRole::Background], 0);
    assert_eq!(table[PixelRole::Delimiter], 50);

    table[PixelRole::Fill] = 7;
    assert_eq!(table[PixelRole::Fill], 7);

    let values: Vec<_> = PixelRole::ALL.into_iter().map(|role| table[role]).collect();
    assert_eq!(values, vec![0, 10, 20, 7, 40, 50]);
}

#[test]
fn role_table_map_preserves_roles() {
    let table = RoleTable::from_fn(|role| role);
    let mapped = table.map(|role, &v| role == v);
    assert!(PixelRole::ALL.into_iter().all(|role| mapped[role]));
}

#[test]
fn only_bit_accent_fill_are_colored() {
    let colored: Vec<_> = PixelRole::ALL
        .into_iter()
        .filter(|r| r.is_colored())
        .collect();
    assert_eq!(
        colored,
        vec![PixelRole::Bit, PixelRole::Accent, PixelRole::Fill]
    );
}

#[test]
fn variants_cover_every_byte_in_order() {
    let all: Vec<_> = Variant::all().collect();
    assert_eq!(all.len(), VARIANT_COUNT);
    assert_eq!(all[0], Variant(0));
    assert_eq!(all[255].index(), 255);
}

use crate::core::layout::{
    create_responsive_font, dialog_size, should_use_cards, table_columns, FontSpec, TableKind,
    MIN_FONT_SIZE,
};
use crate::core::responsive::Breakpoint;

#[test]
fn test_font_scaling_floors_the_size() {
    let base = FontSpec::styled("Cairo", 18, "bold");
    let scaled = create_responsive_font(&base, 0.5);

    assert_eq!(scaled.family, "Cairo");
    assert_eq!(scaled.size, 9);
    assert_eq!(scaled.style.as_deref(), Some("bold"));
}

#[test]
fn test_font_scaling_clamps_to_minimum() {
    let base = FontSpec::styled("Cairo", 10, "bold");
    let scaled = create_responsive_font(&base, 0.1);

    // 10 * 0.1 = 1, clamped up to the legibility floor
    assert_eq!(scaled.size, MIN_FONT_SIZE);
    assert_eq!(scaled.family, "Cairo");
}

#[test]
fn test_font_scaling_identity() {
    let base = FontSpec::new("Cairo", 14);
    let scaled = create_responsive_font(&base, 1.0);

    assert_eq!(scaled, base);
}

#[test]
fn test_font_pango_string() {
    assert_eq!(FontSpec::new("Cairo", 14).to_pango(), "Cairo 14");
    assert_eq!(
        FontSpec::styled("Cairo", 18, "bold").to_pango(),
        "Cairo bold 18"
    );
}

#[test]
fn test_card_layout_only_on_mobile() {
    assert!(should_use_cards(Breakpoint::Mobile));
    assert!(!should_use_cards(Breakpoint::Tablet));
    assert!(!should_use_cards(Breakpoint::Desktop));
}

#[test]
fn test_member_columns_grow_with_breakpoint() {
    let mobile = table_columns(Breakpoint::Mobile, TableKind::Members);
    let tablet = table_columns(Breakpoint::Tablet, TableKind::Members);
    let desktop = table_columns(Breakpoint::Desktop, TableKind::Members);

    assert!(mobile.len() < tablet.len());
    assert!(tablet.len() < desktop.len());

    // The name column survives every breakpoint
    assert!(mobile.contains(&"name"));
    assert!(tablet.contains(&"name"));
    assert!(desktop.contains(&"name"));
}

#[test]
fn test_every_table_has_columns_at_every_breakpoint() {
    let tables = [
        TableKind::Members,
        TableKind::Payments,
        TableKind::Subscriptions,
        TableKind::Attendance,
    ];
    let breakpoints = [Breakpoint::Mobile, Breakpoint::Tablet, Breakpoint::Desktop];

    for table in tables {
        for bp in breakpoints {
            assert!(
                !table_columns(bp, table).is_empty(),
                "{:?} at {:?} has no columns",
                table,
                bp
            );
        }
    }
}

#[test]
fn test_dialog_size_hints() {
    // Relative on small screens, fixed pixels on desktop
    assert_eq!(dialog_size(Breakpoint::Mobile), ("95%", "90%"));
    assert_eq!(dialog_size(Breakpoint::Tablet), ("80%", "75%"));
    assert_eq!(dialog_size(Breakpoint::Desktop), ("700", "520"));
}

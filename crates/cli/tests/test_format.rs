use cli::format_numbered_list;

#[test]
fn test_numbered_list_layout() {
    let list = format_numbered_list(&["First sentence.", "Second one."]);
    assert_eq!(list, "1. First sentence. \n2. Second one. \n");
}

#[test]
fn test_single_item() {
    assert_eq!(format_numbered_list(&["only"]), "1. only \n");
}

#[test]
fn test_items_kept_verbatim() {
    // Внутренние пробелы и юникод не трогаем
    let list = format_numbered_list(&["  spaced  ", "Привет, мир."]);
    assert_eq!(list, "1.   spaced   \n2. Привет, мир. \n");
}

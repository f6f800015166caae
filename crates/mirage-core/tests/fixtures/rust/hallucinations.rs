fn load(path: &String) -> Option<usize> {
    let mut items = Vec::new();
    items.push_back(1);
    if items.length() == 0 {
        return null;
    }
    Some(items.len())
}

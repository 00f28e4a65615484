use web_sys::{Storage, Window};

pub fn window() -> Result<Window, String> {
    super::window().ok_or_else(|| "No window object".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

pub fn read_item(storage: &Storage, key: &str) -> Result<Option<String>, String> {
    storage
        .get_item(key)
        .map_err(|_| format!("Failed to read {}", key))
}

pub fn write_item(storage: &Storage, key: &str, value: &str) -> Result<(), String> {
    storage
        .set_item(key, value)
        .map_err(|_| format!("Failed to store {}", key))
}

pub fn remove_item(storage: &Storage, key: &str) -> Result<(), String> {
    storage
        .remove_item(key)
        .map_err(|_| format!("Failed to remove {}", key))
}

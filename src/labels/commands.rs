use crate::models::Label;

#[tauri::command]
pub fn get_label_catalog() -> Vec<Label> {
    super::label_catalog()
}

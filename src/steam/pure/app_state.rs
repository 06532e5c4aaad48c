use crate::vdf::Document;

/// Extract the "AppState" block of an appmanifest with lower-cased keys
///
/// Old clients wrote 'appID' where newer ones write 'appid', so every field
/// is looked up in lower case after this.
pub fn app_state(doc: &Document) -> Option<Document> {
    doc.get_doc("AppState").cloned().map(Document::lowercase_keys)
}

/// Entities that may carry an uploaded logo.
pub trait HasLogo {
    /// Storage-relative path of the logo, if one was uploaded.
    fn logo_path(&self) -> Option<&str>;

    /// Key under which a new logo upload is stored.
    fn logo_upload_key(&self, extension: &str) -> String;

    fn has_logo(&self) -> bool {
        self.logo_path().is_some()
    }

    /// Public URL of the logo below `media_base`.
    fn logo_url(&self, media_base: &str) -> Option<String> {
        self.logo_path().map(|path| {
            format!(
                "{}/{}",
                media_base.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        })
    }
}

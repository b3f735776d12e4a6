//! String-backed identifier newtypes.

macro_rules! impl_id {
    ($($name:ident),* $(,)?) => {
        $(
            impl $name {
                /// Fresh random (v4) identifier.
                pub fn new() -> Self {
                    Self(uuid::Uuid::new_v4().to_string())
                }
            }

            impl Default for $name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(raw: &str) -> Self {
                    Self(raw.to_owned())
                }
            }
        )*
    };
}

pub(crate) use impl_id;

/// Inline style currently applied to the container.
///
/// Unset fields leave the element's natural value in place. Updates go through
/// [`StyleSnapshot::overlay`] so every change is "previous style with these fields replaced".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl StyleSnapshot {
    /// New snapshot with every field set in `patch` replacing the current one.
    pub fn overlay(&self, patch: &StyleSnapshot) -> StyleSnapshot {
        StyleSnapshot {
            opacity: patch.opacity.or(self.opacity),
            transform: patch.transform.clone().or_else(|| self.transform.clone()),
            background_color: patch
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            color: patch.color.clone().or_else(|| self.color.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &StyleSnapshot::default()
    }

    /// `(property, value)` pairs in CSS order, unset fields skipped.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(4);
        if let Some(v) = self.opacity {
            out.push(("opacity", v.to_string()));
        }
        if let Some(v) = &self.transform {
            out.push(("transform", v.clone()));
        }
        if let Some(v) = &self.background_color {
            out.push(("background-color", v.clone()));
        }
        if let Some(v) = &self.color {
            out.push(("color", v.clone()));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/snapshot.rs"]
mod tests;

use leptos::prelude::*;

/// CSS-класс модификатора для варианта бейджа.
fn variant_class(variant: &str) -> &'static str {
    match variant {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    }
}

/// Бейдж-счётчик с вариантами оформления.
#[component]
pub fn Badge(
    /// Вариант: "primary", "success", "warning", "error", "neutral" (по умолчанию)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Содержимое бейджа
    children: Children,
) -> impl IntoView {
    let class = move || {
        let variant = variant.get().unwrap_or_default();
        format!("badge {}", variant_class(&variant))
    };

    view! {
        <span class=class>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_variants_map_to_modifiers() {
        assert_eq!(variant_class("primary"), "badge--primary");
        assert_eq!(variant_class("error"), "badge--error");
    }

    #[test]
    fn unknown_variant_falls_back_to_neutral() {
        assert_eq!(variant_class(""), "badge--neutral");
        assert_eq!(variant_class("exotic"), "badge--neutral");
    }
}

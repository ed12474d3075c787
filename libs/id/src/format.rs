//! Rendering typed IDs back to their canonical string form.

use crate::path::{PROVIDERS, RESOURCE_GROUPS, SUBSCRIPTIONS};

/// Renders the canonical ID string.
///
/// `segments` and `values` are positional: the n-th value is written after
/// the n-th literal segment name.
pub fn render(
    subscription_id: &str,
    resource_group: &str,
    provider: Option<&str>,
    segments: &[&str],
    values: &[&str],
) -> String {
    debug_assert_eq!(segments.len(), values.len());

    let mut out = format!("/{SUBSCRIPTIONS}/{subscription_id}/{RESOURCE_GROUPS}/{resource_group}");
    if let Some(provider) = provider {
        out.push_str(&format!("/{PROVIDERS}/{provider}"));
    }
    for (segment, value) in segments.iter().zip(values) {
        out.push_str(&format!("/{segment}/{value}"));
    }
    out
}

/// Renders a kind's template with `{placeholder}` values, e.g.
/// `.../availabilitySets/{name}`.
pub fn template(provider: Option<&str>, segments: &[&str], fields: &[&str]) -> String {
    let placeholders: Vec<String> = fields.iter().map(|field| format!("{{{}}}", camel_case(field))).collect();
    let placeholders: Vec<&str> = placeholders.iter().map(String::as_str).collect();
    render(
        "{subscriptionId}",
        "{resourceGroupName}",
        provider,
        segments,
        &placeholders,
    )
}

/// Describes an ID for humans, innermost segment first:
/// `Dedicated Host: (Name "host1" / Host Group Name "group1" / Resource Group "rg1")`.
pub fn describe(kind: &str, resource_group: &str, fields: &[&str], values: &[&str]) -> String {
    let mut parts: Vec<String> = fields
        .iter()
        .zip(values)
        .rev()
        .map(|(field, value)| format!("{} {value:?}", title_case(field)))
        .collect();
    parts.push(format!("Resource Group {resource_group:?}"));
    format!("{kind}: ({})", parts.join(" / "))
}

fn title_case(field: &str) -> String {
    field
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn camel_case(field: &str) -> String {
    let title = title_case(field).replace(' ', "");
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let id = render(
            "s1",
            "rg1",
            Some("Microsoft.Compute"),
            &["galleries", "images", "versions"],
            &["gallery1", "image1", "1.0.0"],
        );
        assert_eq!(
            id,
            "/subscriptions/s1/resourceGroups/rg1/providers/Microsoft.Compute/galleries/gallery1/images/image1/versions/1.0.0"
        );
    }

    #[test]
    fn test_render_resource_group() {
        assert_eq!(render("s1", "rg1", None, &[], &[]), "/subscriptions/s1/resourceGroups/rg1");
    }

    #[test]
    fn test_template() {
        assert_eq!(
            template(Some("Microsoft.Compute"), &["hostGroups", "hosts"], &["host_group_name", "name"]),
            "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Compute/hostGroups/{hostGroupName}/hosts/{name}"
        );
    }

    #[test]
    fn test_describe_lists_innermost_first() {
        assert_eq!(
            describe("Dedicated Host", "rg1", &["host_group_name", "name"], &["group1", "host1"]),
            r#"Dedicated Host: (Name "host1" / Host Group Name "group1" / Resource Group "rg1")"#
        );
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(title_case("virtual_machine_name"), "Virtual Machine Name");
        assert_eq!(camel_case("virtual_machine_name"), "virtualMachineName");
        assert_eq!(camel_case("name"), "name");
    }
}

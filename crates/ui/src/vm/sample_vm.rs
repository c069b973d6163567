use services::SampleItem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRowVm {
    pub id: u32,
    pub label: String,
}

#[must_use]
pub fn map_sample_rows(items: &[SampleItem]) -> Vec<SampleRowVm> {
    items
        .iter()
        .map(|item| SampleRowVm {
            id: item.id,
            label: format!("{}: {:.2}", item.name, item.value),
        })
        .collect()
}

#[must_use]
pub fn format_total(total: f64) -> String {
    format!("{total:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_show_two_decimals() {
        let items = vec![SampleItem {
            id: 1,
            name: "Item 1".to_string(),
            value: 0.456,
        }];
        let rows = map_sample_rows(&items);
        assert_eq!(rows[0].label, "Item 1: 0.46");
        assert_eq!(format_total(1.0), "1.00");
    }
}

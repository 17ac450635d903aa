/// A table region that grows one row at a time.
pub trait TableSink {
    fn append_row(&mut self, cells: [String; 3]);
}

/// A field whose placeholder text can be replaced.
pub trait PlaceholderSink {
    fn set_placeholder(&mut self, text: String);
}

impl<T: TableSink + ?Sized> TableSink for &mut T {
    fn append_row(&mut self, cells: [String; 3]) {
        (**self).append_row(cells);
    }
}

impl<T: PlaceholderSink + ?Sized> PlaceholderSink for &mut T {
    fn set_placeholder(&mut self, text: String) {
        (**self).set_placeholder(text);
    }
}

/// The `chart` table: rows in append order, never deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartTable {
    rows: Vec<[String; 3]>,
}

impl ChartTable {
    pub fn rows(&self) -> &[[String; 3]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableSink for ChartTable {
    fn append_row(&mut self, cells: [String; 3]) {
        self.rows.push(cells);
    }
}

/// An input field identified by `id`, e.g. `accuracy`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderField {
    id: &'static str,
    placeholder: Option<String>,
}

impl PlaceholderField {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            placeholder: None,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}

impl PlaceholderSink for PlaceholderField {
    fn set_placeholder(&mut self, text: String) {
        self.placeholder = Some(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(file: &str) -> [String; 3] {
        [file.to_string(), "0.5".to_string(), "spam".to_string()]
    }

    #[test]
    fn chart_appends_in_order() {
        let mut chart = ChartTable::default();
        chart.append_row(row("b"));
        chart.append_row(row("a"));
        chart.append_row(row("b"));
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.rows()[0][0], "b");
        assert_eq!(chart.rows()[1][0], "a");
        assert_eq!(chart.rows()[2][0], "b");
    }

    #[test]
    fn placeholder_starts_unset_and_is_replaced() {
        let mut field = PlaceholderField::new("accuracy");
        assert_eq!(field.placeholder(), None);
        field.set_placeholder("0.5".to_string());
        field.set_placeholder("0.93".to_string());
        assert_eq!(field.placeholder(), Some("0.93"));
        assert_eq!(field.id(), "accuracy");
    }

    #[test]
    fn mutable_reference_forwards_to_sink() {
        fn push<T: TableSink>(mut sink: T) {
            sink.append_row(row("via-ref"));
        }

        let mut chart = ChartTable::default();
        push(&mut chart);
        assert_eq!(chart.rows()[0][0], "via-ref");
    }
}

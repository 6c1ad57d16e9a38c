//! Presentation surface the dashboard renders onto

/// Layout and widget primitives used by the dashboard pipeline
///
/// Cells opened with [`Surface::column`] hold every element added until the
/// next cell or [`Surface::end_columns`].
pub trait Surface {
    /// Page heading
    fn title(&mut self, text: &str);

    /// Start a row of `count` side-by-side columns
    fn columns(&mut self, count: usize);

    /// Move to the next column of the current row
    fn column(&mut self);

    /// Close the current row of columns
    fn end_columns(&mut self);

    /// Labelled KPI value
    fn metric(&mut self, label: &str, value: &str);

    /// Section heading
    fn subheader(&mut self, text: &str);

    /// Embed a rendered chart
    fn chart(&mut self, svg: &str);

    /// Informational notice
    fn info(&mut self, text: &str);

    /// Fatal error notice
    fn error(&mut self, text: &str);
}

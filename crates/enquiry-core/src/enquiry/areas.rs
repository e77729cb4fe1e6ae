//! Areas-of-practice reference list.

/// One enquiry topic from the areas-of-practice taxonomy.
///
/// The list is fetched once per wizard instance and shared read-only
/// for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AreaOfPractice {
    pub id: String,
    pub name: String,
}

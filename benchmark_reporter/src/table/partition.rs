//!
//! Workload partitioning into separate tables.
//!

///
/// Workloads split into the main table and the bottom table.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partition {
    /// Workloads of the main table, in report order.
    pub primary: Vec<String>,
    /// Workloads of the bottom table, in report order.
    pub secondary: Vec<String>,
}

impl Partition {
    ///
    /// Splits `workloads` by a predicate selecting the bottom table.
    ///
    pub fn split<P>(workloads: &[String], is_secondary: P) -> Self
    where
        P: Fn(&str) -> bool,
    {
        let (secondary, primary) = workloads
            .iter()
            .cloned()
            .partition(|workload| is_secondary(workload.as_str()));
        Self { primary, secondary }
    }

    ///
    /// Splits `workloads` by an explicit bottom table membership list.
    ///
    /// Members that are not among `workloads` are ignored.
    ///
    pub fn by_membership<S>(workloads: &[String], members: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        Self::split(workloads, |workload| {
            members.iter().any(|member| member.as_ref() == workload)
        })
    }
}

/// Resource catalog adapters
mod kubernetes_catalog;

pub use kubernetes_catalog::KubernetesCatalog;

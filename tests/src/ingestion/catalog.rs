use reconview_common::error::CatalogError;
use reconview_core::repository::fs::FsScanRepository;
use reconview_core::service::ReconService;

use crate::utils::ReconTree;

fn service(tree: &ReconTree) -> ReconService {
    ReconService::new(Box::new(FsScanRepository::new(tree.root())))
}

#[tokio::test]
async fn catalog_lists_only_scan_directories() -> anyhow::Result<()> {
    let tree = ReconTree::new();
    tree.full_scan("scanB");
    tree.empty_scan("scanA");
    tree.write(tree.root().join("notes.txt"), "not a scan");

    let scans = service(&tree).list_scans().await?;
    let names: Vec<&str> = scans.iter().map(|s| s.as_str()).collect();
    assert_eq!(names, ["scanA", "scanB"], "regular files must not be listed");
    Ok(())
}

#[tokio::test]
async fn catalog_of_missing_root_is_not_found() {
    let tree = ReconTree::new();
    let service = ReconService::new(Box::new(FsScanRepository::new(tree.root().join("Recon"))));

    let err = service.list_scans().await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn report_refuses_unlisted_scan() {
    let tree = ReconTree::new();
    tree.empty_scan("scanA");

    let err = service(&tree)
        .report(&"scanZ".parse().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::UnknownScan(ref name) if name == "scanZ"));
}

#[tokio::test]
async fn categories_of_unlisted_scan_are_empty() {
    let tree = ReconTree::new();
    let service = service(&tree);
    let scan = "scanZ".parse().unwrap();

    assert!(service.subdomains(&scan).await.is_empty());
    assert!(service.hosts(&scan).await.is_empty());
    assert!(service.vulnerabilities(&scan).await.is_empty());
    assert!(service.osint(&scan).await.is_empty());
    assert!(service.ports(&scan).await.is_empty());
}

//! 產品建立流程示例：目錄 → 草稿 → 提交

use costeo::prelude::*;

const INSUMOS_JSON: &str = r#"[
    {"referencia": "DENIM-01", "nombre": "Denim 14 oz", "unidad_medida": "metro", "precio_unitario": 15000},
    {"referencia": "HILO-01", "nombre": "Hilo poliéster", "unidad_medida": "cono", "precio_unitario": 2500},
    {"referencia": "BOTON-01", "nombre": "Botón metálico", "precio_unitario": 350}
]"#;

const MANOS_JSON: &str = r#"[
    {"referencia": "CORTE", "nombre": "Corte", "precio": 4000},
    {"referencia": "COSTURA", "nombre": "Costura completa", "precio": 25000}
]"#;

fn main() -> anyhow::Result<()> {
    costeo::logging::init();

    let catalog = PriceCatalog::from_json(TenantId::new("CONFECCIONES-ANDINA"), INSUMOS_JSON, MANOS_JSON)?;
    let config = CosteoConfig::new();

    let mut draft = ProductDraft::new(
        "PANT-CLASICO".to_string(),
        "Pantalón clásico".to_string(),
        config.clone(),
    );

    draft.attach_material_from_catalog(
        &catalog,
        &MaterialSelection::new("DENIM-01".to_string(), Decimal::new(15, 1)),
    )?;
    draft.attach_material_from_catalog(
        &catalog,
        &MaterialSelection::new("HILO-01".to_string(), Decimal::from(2)),
    )?;
    draft.attach_material_from_catalog(
        &catalog,
        &MaterialSelection::new("BOTON-01".to_string(), Decimal::ONE),
    )?;
    for process in ["CORTE", "COSTURA"] {
        draft.attach_labor_from_catalog(&catalog, &LaborSelection::new(process.to_string()))?;
    }

    for size in ["30", "32", "34", "36"] {
        draft.select_size(SizeLabel::from(size))?;
    }
    draft.set_total_quantity(120)?;
    draft.edit_size_quantity(&SizeLabel::from("36"), 25)?;

    let cost = draft.cost_breakdown()?;
    println!("單位成本: {}", config.round_currency(cost.total));
    if let Some(evaluation) = draft.evaluation() {
        println!("尺碼分配狀態: {:?}", evaluation.status());
    }

    let submission = draft.submit()?;
    for warning in &submission.warnings {
        println!("[{:?}] {}: {}", warning.severity, warning.subject, warning.message);
    }
    println!(
        "批次總成本: {}",
        submission.cost.production_cost(submission.payload.total_units() as u32)
    );
    println!("POST /pantalones\n{}", serde_json::to_string_pretty(&submission.payload)?);

    Ok(())
}

//! 簡單成本計算示例

use costeo::prelude::*;

fn main() -> anyhow::Result<()> {
    costeo::logging::init();

    println!("=== 簡單成本計算示例 ===\n");

    let materials = vec![
        MaterialUsage::new("DENIM-01".to_string(), Decimal::from(15000), Decimal::new(15, 1)),
        MaterialUsage::new("HILO-01".to_string(), Decimal::from(2500), Decimal::from(2)),
    ];
    let labor = vec![LaborProcess::new("COSTURA".to_string(), Decimal::from(25000))];

    let breakdown = CostingEngine::compute_cost_breakdown(&materials, &labor);

    println!("物料明細:");
    for line in &breakdown.material_lines {
        println!(
            "  - {}: {} × {} = {}",
            line.material_id, line.unit_price, line.quantity_used, line.line_cost
        );
    }
    println!("物料小計: {}", breakdown.materials_subtotal);
    println!("工序小計: {}", breakdown.labor_subtotal);
    println!("單位成本: {}", breakdown.total);

    let sizes: Vec<SizeLabel> = ["36", "32", "34"].into_iter().map(SizeLabel::from).collect();
    let distribution = SizeAllocator::distribute_evenly(50, &sizes);

    println!("\n尺碼分配（50 件）:");
    for (size, quantity) in &distribution {
        println!("  - {}: {}", size, quantity);
    }

    let edited = SizeAllocator::update_single_size(&distribution, &SizeLabel::from("36"), 20);
    let evaluation = SizeAllocator::evaluate_distribution(&edited, 50);
    println!(
        "\n手動修改 36 → 20：已分配 {}，預期 {}，狀態 {:?}",
        evaluation.distributed,
        evaluation.expected,
        evaluation.status()
    );

    Ok(())
}

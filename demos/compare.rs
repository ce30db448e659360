extern crate adversarial_search;

use adversarial_search::comparison::Comparison;
use adversarial_search::fixtures::random_tree::RandomTreeBuilder;
use adversarial_search::fixtures::two_ply::{lecture_tree, textbook_tree};
use adversarial_search::game_tree::GameTree;
use tracing_subscriber::EnvFilter;

fn main() -> adversarial_search::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    report("Lecture tree", &lecture_tree()?)?;
    report("Textbook tree", &textbook_tree()?)?;

    // Deeper seeded tree, where pruning pays off more
    let random = RandomTreeBuilder::seeded(2024)
        .with_depth(6)
        .with_branching(2, 4)
        .with_value_range(-100, 100)
        .build()?;
    report("Random tree (seed 2024)", &random)?;

    Ok(())
}

fn report(title: &str, tree: &GameTree) -> adversarial_search::Result<()> {
    println!("{title}: {} nodes, {} plies", tree.len(), tree.depth());
    let comparison = Comparison::run(tree)?;
    println!("{comparison}");
    println!();

    assert!(comparison.values_agree());
    assert!(comparison.pruned().expanded_nodes <= comparison.baseline().expanded_nodes);
    Ok(())
}

mod common;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use randgraph_core::{
    GraphConfigBuilder, GraphError, GraphErrorCode, GraphRandomizer, GraphShape, generate_graph,
};
use rstest::rstest;

use common::{
    ZeroSource, edges_are_distinct, reachability_closure, strong_component_count,
    weak_component_count,
};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[rstest]
#[case(1)]
#[case(42)]
#[case(9_001)]
fn six_nodes_seven_edges(#[case] seed: u64) -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(6)
        .with_edges(7)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(seed))?;
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 7);
    assert!(edges_are_distinct(&graph, false));
    assert!(graph.edges().iter().all(|edge| !edge.is_loop()));
    assert_eq!(weak_component_count(&graph), 1);
    Ok(())
}

#[rstest]
fn three_nodes_cannot_hold_ten_edges(#[values(3, 77)] seed: u64) -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(3)
        .with_edges(10)
        .with_directed(true)
        .with_loops(false)
        .with_components(1)
        .build()?;
    let err = generate_graph(&config, &mut SmallRng::seed_from_u64(seed))
        .expect_err("at most 6 loop-free directed edges fit on 3 nodes");
    assert_eq!(err.code(), GraphErrorCode::InsufficientEdges);
    assert!(!err.is_invalid_configuration());
    assert_eq!(
        err,
        GraphError::InsufficientEdges {
            requested: 10,
            placed: 6,
        }
    );
    Ok(())
}

#[test]
fn three_nodes_fill_completely_with_loops() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(3)
        .with_edges(9)
        .with_loops(true)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(5))?;
    assert_eq!(graph.edge_count(), 9);
    let loops = graph.edges().iter().filter(|edge| edge.is_loop()).count();
    assert_eq!(loops, 3);
    Ok(())
}

#[rstest]
fn dag_edges_only_descend(#[values(0, 1, 2, 3, 4, 5)] seed: u64) -> TestResult {
    let config = GraphConfigBuilder::new().with_nodes(5).dag().build()?;
    assert_eq!(config.shape(), GraphShape::Dag);
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(seed))?;
    assert_eq!(graph.edge_count(), 5);
    assert!(graph.edges().iter().all(|edge| edge.source > edge.target));
    assert_eq!(strong_component_count(&graph), 5);
    Ok(())
}

#[test]
fn dense_dag_stays_acyclic() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(12)
        .with_edges(30)
        .with_components(2)
        .dag()
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(31))?;
    assert_eq!(graph.edge_count(), 30);
    let closure = reachability_closure(&graph);
    for edge in graph.edges() {
        assert!(
            !closure[edge.target].contains(&edge.source),
            "edge {edge:?} closes a cycle"
        );
    }
    Ok(())
}

#[rstest]
#[case(10, 25, 1)]
#[case(16, 30, 3)]
#[case(30, 45, 5)]
fn undirected_graphs_never_hold_both_orientations(
    #[case] nodes: usize,
    #[case] edges: usize,
    #[case] components: usize,
) -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(nodes)
        .with_edges(edges)
        .with_components(components)
        .with_directed(false)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(12))?;
    assert!(!graph.is_directed());
    assert_eq!(graph.edge_count(), edges);
    assert!(edges_are_distinct(&graph, true));
    assert_eq!(weak_component_count(&graph), components);
    Ok(())
}

#[rstest]
#[case(12, 30, 1, 1)]
#[case(12, 30, 4, 2)]
#[case(20, 30, 5, 5)]
#[case(9, 9, 9, 3)]
fn requested_strong_blocks_become_strong_components(
    #[case] nodes: usize,
    #[case] edges: usize,
    #[case] strong_blocks: usize,
    #[case] components: usize,
    #[values(8, 64, 512)] seed: u64,
) -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(nodes)
        .with_edges(edges)
        .with_strong_blocks(strong_blocks)
        .with_components(components)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(seed))?;
    assert!(graph.edge_count() >= edges);
    assert!(edges_are_distinct(&graph, false));
    assert_eq!(strong_component_count(&graph), strong_blocks);
    assert_eq!(weak_component_count(&graph), components);
    Ok(())
}

#[test]
fn single_block_overshoots_a_small_target() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(6)
        .with_edges(3)
        .with_strong_blocks(1)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(4))?;
    assert!(graph.edge_count() >= 6);
    assert_eq!(strong_component_count(&graph), 1);
    Ok(())
}

#[test]
fn components_are_never_joined() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(40)
        .with_edges(80)
        .with_components(4)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(2))?;
    assert_eq!(weak_component_count(&graph), 4);
    Ok(())
}

#[test]
fn sampled_mode_reaches_target_on_large_graphs() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(1_500)
        .with_edges(3_000)
        .with_components(3)
        .build()?;
    let graph = generate_graph(&config, &mut SmallRng::seed_from_u64(77))?;
    assert_eq!(graph.node_count(), 1_500);
    assert_eq!(graph.edge_count(), 3_000);
    assert!(edges_are_distinct(&graph, false));
    assert!(graph.edges().iter().all(|edge| !edge.is_loop()));
    assert_eq!(weak_component_count(&graph), 3);
    Ok(())
}

#[test]
fn sampled_mode_gives_up_after_bounded_attempts() -> TestResult {
    // 1,001 singleton components leave no legal filler pair at all.
    let config = GraphConfigBuilder::new()
        .with_nodes(1_001)
        .with_edges(10)
        .with_components(1_001)
        .build()?;
    let err = generate_graph(&config, &mut SmallRng::seed_from_u64(1))
        .expect_err("no filler pair exists");
    assert_eq!(
        err,
        GraphError::InsufficientEdges {
            requested: 10,
            placed: 0,
        }
    );
    Ok(())
}

#[test]
fn zero_source_is_reproducible() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(8)
        .with_edges(12)
        .build()?;
    let first = generate_graph(&config, &mut ZeroSource)?;
    let second = generate_graph(&config, &mut ZeroSource)?;
    assert_eq!(first, second);
    assert_eq!(first.edge_count(), 12);
    Ok(())
}

#[test]
fn randomizer_regenerates_independently() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(30)
        .with_edges(60)
        .build()?;
    let mut randomizer = GraphRandomizer::from_seed(config.clone(), 10);
    let first = randomizer.generate()?;
    let second = randomizer.generate()?;
    assert_ne!(first, second);
    assert_eq!(randomizer.config(), &config);

    let mut replay = GraphRandomizer::from_seed(config, 10);
    assert_eq!(replay.generate()?, first);
    Ok(())
}

#[test]
fn bipartite_shape_is_inert() -> TestResult {
    let config = GraphConfigBuilder::new()
        .with_nodes(10)
        .with_edges(15)
        .bipartite(0.3)
        .build()?;
    let graph = GraphRandomizer::new(config, SmallRng::seed_from_u64(6)).generate()?;
    assert_eq!(graph.edge_count(), 15);
    Ok(())
}

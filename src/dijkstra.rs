// Copyright (c) 2024 Bastiaan Marinus van de Weerd

//! Shortest-path searches over implicit weighted graphs.
//!
//! Graphs are never materialized: the searches query [`Graph::neighbours`] and
//! [`Graph::edge_weight`] on demand, so logically unbounded graphs work as
//! long as the reachable part is finite. Edge weights are unsigned, which is
//! what the greedy frontier relies on.

use std::{
	cmp::Ordering,
	collections::{BinaryHeap, HashMap, HashSet, hash_map::Entry},
	hash::Hash,
};


pub(crate) trait Graph {
	type Node: Clone + Eq + Hash;

	fn neighbours(&self, node: &Self::Node) -> impl Iterator<Item = Self::Node>;

	/// Weight of the edge from `from` to its neighbour `to`. May panic if
	/// `to` is not one of `from`’s neighbours.
	fn edge_weight(&self, from: &Self::Node, to: &Self::Node) -> usize;
}


/// A [`Graph`] made of a neighbour function and an edge weight function.
pub(crate) struct FnGraph<N, Nb, W> {
	neighbours: Nb,
	edge_weight: W,
	_node: std::marker::PhantomData<fn(&N)>,
}

impl<N, Nb, W> FnGraph<N, Nb, W>
where N: Clone + Eq + Hash, Nb: Fn(&N) -> Vec<N>, W: Fn(&N, &N) -> usize {
	pub(crate) fn new(neighbours: Nb, edge_weight: W) -> Self {
		FnGraph { neighbours, edge_weight, _node: std::marker::PhantomData }
	}
}

impl<N, Nb, W> Graph for FnGraph<N, Nb, W>
where N: Clone + Eq + Hash, Nb: Fn(&N) -> Vec<N>, W: Fn(&N, &N) -> usize {
	type Node = N;

	fn neighbours(&self, node: &N) -> impl Iterator<Item = N> {
		(self.neighbours)(node).into_iter()
	}

	fn edge_weight(&self, from: &N, to: &N) -> usize {
		(self.edge_weight)(from, to)
	}
}


/// Frontier entry; ordered so that [`BinaryHeap`] pops the smallest distance.
struct Tentative<N> {
	distance: usize,
	node: N,
}

impl<N> PartialEq for Tentative<N> {
	fn eq(&self, other: &Self) -> bool {
		self.distance == other.distance
	}
}

impl<N> Eq for Tentative<N> {}

impl<N> PartialOrd for Tentative<N> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<N> Ord for Tentative<N> {
	fn cmp(&self, other: &Self) -> Ordering {
		self.distance.cmp(&other.distance).reverse()
	}
}


/// Dijkstra’s algorithm; returns the minimal distance from `source` to every
/// reachable node. Unreachable nodes are absent.
pub(crate) fn shortest_distances<G: Graph>(graph: &G, source: G::Node) -> HashMap<G::Node, usize> {
	let mut frontier = BinaryHeap::new();
	let mut distances = HashMap::new();
	distances.insert(source.clone(), 0);
	frontier.push(Tentative { distance: 0, node: source });

	while let Some(Tentative { distance, node }) = frontier.pop() {
		// Stale entry (a shorter one was pushed later)
		if distance > distances[&node] { continue }

		for neighbour in graph.neighbours(&node) {
			let candidate = distance + graph.edge_weight(&node, &neighbour);
			match distances.entry(neighbour) {
				Entry::Occupied(entry) if *entry.get() <= candidate => (),
				Entry::Occupied(mut entry) => {
					entry.insert(candidate);
					frontier.push(Tentative { distance: candidate, node: entry.key().clone() });
				}
				Entry::Vacant(entry) => {
					frontier.push(Tentative { distance: candidate, node: entry.key().clone() });
					entry.insert(candidate);
				}
			}
		}
	}

	distances
}


/// Returns every path of minimal total weight from `source` to `target`
/// (empty if `target` is unreachable). Paths never visit a node twice, so
/// zero-weight cycles do not yield endless variations.
///
/// The number of tied paths, and so memory use, can grow exponentially with
/// the size of the graph; only use this where ties are known to be few.
pub(crate) fn all_shortest_paths<G: Graph>(
	graph: &G,
	source: G::Node,
	target: &G::Node,
) -> Vec<Vec<G::Node>> {
	let mut frontier = BinaryHeap::new();
	let mut distances = HashMap::new();
	let mut predecessors = HashMap::<_, Vec<_>>::new();
	let mut target_distance = None;
	distances.insert(source.clone(), 0);
	frontier.push(Tentative { distance: 0, node: source.clone() });

	while let Some(Tentative { distance, node }) = frontier.pop() {
		// Everything at the target's distance is settled, including zero-weight ties into it
		if target_distance.is_some_and(|target_distance| distance > target_distance) { break }
		if distance > distances[&node] { continue }
		if &node == target { target_distance = Some(distance) }

		for neighbour in graph.neighbours(&node) {
			let candidate = distance + graph.edge_weight(&node, &neighbour);
			match distances.entry(neighbour) {
				Entry::Occupied(mut entry) => match entry.get().cmp(&candidate) {
					Ordering::Less => (),
					Ordering::Equal => predecessors.entry(entry.key().clone())
						.or_default()
						.push(node.clone()),
					Ordering::Greater => {
						entry.insert(candidate);
						predecessors.insert(entry.key().clone(), vec![node.clone()]);
						frontier.push(Tentative { distance: candidate, node: entry.key().clone() });
					}
				}
				Entry::Vacant(entry) => {
					predecessors.insert(entry.key().clone(), vec![node.clone()]);
					frontier.push(Tentative { distance: candidate, node: entry.key().clone() });
					entry.insert(candidate);
				}
			}
		}
	}

	if target_distance.is_none() { return Vec::new() }

	#[cfg(LOGGING)]
	println!("target at {target_distance:?}, {} node(s) with predecessors", predecessors.len());

	// Walk the predecessors back from the target, one branch index per node on the path
	let mut paths = Vec::new();
	let mut path = vec![target.clone()];
	let mut on_path = HashSet::from([target.clone()]);
	let mut branches = vec![0];
	while let (Some(node), Some(branch)) = (path.last(), branches.last_mut()) {
		let next = if node == &source {
			None
		} else {
			predecessors.get(node).and_then(|preds| preds.get(*branch)).cloned()
		};

		match next {
			Some(pred) => {
				*branch += 1;
				if on_path.insert(pred.clone()) {
					path.push(pred);
					branches.push(0);
				}
			}
			None => {
				if node == &source { paths.push(path.iter().rev().cloned().collect::<Vec<_>>()) }
				if let Some(node) = path.pop() { on_path.remove(&node); }
				branches.pop();
			}
		}
	}

	paths
}


#[allow(dead_code)]
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct NoPathBetween<N> {
	pub(crate) start: N,
	pub(crate) end: N,
}

/// A* search for a single shortest path from `start` to `end`. The
/// `heuristic` must never overestimate the remaining distance to `end`.
pub(crate) fn a_star_path<G: Graph>(
	graph: &G,
	start: G::Node,
	end: G::Node,
	heuristic: impl Fn(&G::Node) -> usize,
) -> Result<Vec<G::Node>, NoPathBetween<G::Node>> {
	let mut frontier = BinaryHeap::new();
	let mut distances = HashMap::new();
	let mut came_from = HashMap::new();
	distances.insert(start.clone(), 0);
	frontier.push(Tentative { distance: heuristic(&start), node: start.clone() });

	while let Some(Tentative { distance: estimate, node }) = frontier.pop() {
		if node == end {
			let mut path = vec![node];
			while let Some(prev) = came_from.get(&path[path.len() - 1]) {
				path.push(G::Node::clone(prev));
			}
			path.reverse();
			return Ok(path)
		}

		let distance = distances[&node];
		if estimate > distance + heuristic(&node) { continue }

		for neighbour in graph.neighbours(&node) {
			let candidate = distance + graph.edge_weight(&node, &neighbour);
			if distances.get(&neighbour).is_some_and(|&best| best <= candidate) { continue }
			distances.insert(neighbour.clone(), candidate);
			came_from.insert(neighbour.clone(), node.clone());
			frontier.push(Tentative { distance: candidate + heuristic(&neighbour), node: neighbour });
		}
	}

	Err(NoPathBetween { start, end })
}


#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use test_case::test_case;
	use super::*;

	type Edges = HashMap<char, Vec<(char, usize)>>;

	fn graph(edges: &[(char, char, usize)]) -> FnGraph<char, impl Fn(&char) -> Vec<char>, impl Fn(&char, &char) -> usize> {
		let mut adjacency = Edges::new();
		for &(from, to, weight) in edges {
			adjacency.entry(from).or_default().push((to, weight));
		}
		let weights = adjacency.clone();
		FnGraph::new(
			move |node: &char| adjacency.get(node)
				.map(|edges| edges.iter().map(|&(to, _)| to).collect::<Vec<_>>())
				.unwrap_or_default(),
			move |from: &char, to: &char| weights[from].iter()
				.filter(|&&(t, _)| t == *to)
				.map(|&(_, w)| w)
				.min()
				.expect("no such edge"))
	}

	fn undirected(edges: &[(char, char, usize)]) -> Vec<(char, char, usize)> {
		edges.iter().flat_map(|&(a, b, w)| [(a, b, w), (b, a, w)]).collect()
	}

	fn path_weight(edges: &[(char, char, usize)], path: &[char]) -> usize {
		let graph = graph(edges);
		path.windows(2).map(|w| graph.edge_weight(&w[0], &w[1])).sum()
	}

	const CHAIN: &[(char, char, usize)] = &[('A', 'B', 1), ('B', 'C', 1), ('C', 'D', 1)];
	const DIAMOND: &[(char, char, usize)] = &[('A', 'B', 1), ('A', 'C', 1), ('B', 'D', 1), ('C', 'D', 1)];
	const DETOUR: &[(char, char, usize)] = &[('A', 'D', 10), ('A', 'B', 1), ('B', 'C', 1), ('C', 'D', 1)];
	const SELF_LOOP: &[(char, char, usize)] = &[('A', 'A', 0), ('A', 'B', 2)];
	const ZERO_DIAMOND: &[(char, char, usize)] = &[('A', 'B', 0), ('A', 'C', 0), ('B', 'C', 0)];
	const ZERO_DIAMOND_REVERSED: &[(char, char, usize)] = &[('A', 'C', 0), ('A', 'B', 0), ('B', 'C', 0)];
	const ZERO_CYCLE: &[(char, char, usize)] = &[('A', 'B', 1), ('B', 'C', 0), ('C', 'B', 0), ('C', 'D', 1)];

	#[test_case(CHAIN, &[('A', 0), ('B', 1), ('C', 2), ('D', 3)] ; "linear chain")]
	#[test_case(DIAMOND, &[('A', 0), ('B', 1), ('C', 1), ('D', 2)] ; "diamond")]
	#[test_case(DETOUR, &[('A', 0), ('B', 1), ('C', 2), ('D', 3)] ; "cheaper detour")]
	#[test_case(SELF_LOOP, &[('A', 0), ('B', 2)] ; "zero-weight self-loop")]
	#[test_case(ZERO_DIAMOND, &[('A', 0), ('B', 0), ('C', 0)] ; "zero-weight diamond")]
	#[test_case(&[], &[('A', 0)] ; "isolated source")]
	fn distances(edges: &[(char, char, usize)], expected: &[(char, usize)]) {
		let distances = shortest_distances(&graph(edges), 'A');
		assert_eq!(distances, expected.iter().copied().collect::<HashMap<_, _>>());
	}

	#[test]
	fn distances_undirected_chain() {
		let distances = shortest_distances(&graph(&undirected(CHAIN)), 'C');
		assert_eq!(distances, HashMap::from([('A', 2), ('B', 1), ('C', 0), ('D', 1)]));
	}

	#[test]
	fn distances_disconnected() {
		let edges = [CHAIN, &[('E', 'E', 1)]].concat();
		let distances = shortest_distances(&graph(&edges), 'A');
		assert!(!distances.contains_key(&'E'));
		assert_eq!(distances.len(), 4);
	}

	#[test]
	fn distances_deterministic() {
		let edges = undirected(&[DIAMOND, DETOUR].concat());
		let graph = graph(&edges);
		let first = shortest_distances(&graph, 'A');
		for _ in 0..10 {
			assert_eq!(shortest_distances(&graph, 'A'), first);
		}
	}

	#[test_case(CHAIN, 'D', &["ABCD"] ; "linear chain")]
	#[test_case(DIAMOND, 'D', &["ABD", "ACD"] ; "diamond")]
	#[test_case(DETOUR, 'D', &["ABCD"] ; "cheaper detour")]
	#[test_case(SELF_LOOP, 'A', &["A"] ; "zero-weight self-loop to source")]
	#[test_case(SELF_LOOP, 'B', &["AB"] ; "zero-weight self-loop")]
	#[test_case(ZERO_DIAMOND, 'C', &["ABC", "AC"] ; "zero-weight diamond")]
	#[test_case(ZERO_DIAMOND_REVERSED, 'C', &["ABC", "AC"] ; "zero-weight diamond in reverse order")]
	#[test_case(ZERO_CYCLE, 'D', &["ABCD"] ; "zero-weight cycle")]
	#[test_case(CHAIN, 'E', &[] ; "unreachable")]
	fn paths(edges: &[(char, char, usize)], target: char, expected: &[&str]) {
		let mut paths = all_shortest_paths(&graph(edges), 'A', &target)
			.into_iter()
			.map(|path| path.into_iter().collect::<String>())
			.collect::<Vec<_>>();
		paths.sort();
		assert_eq!(paths, expected);
	}

	#[test]
	fn paths_valid_and_complete() {
		// Two diamonds in a row: 2 × 2 tied paths, plus a tied direct edge
		let edges = [
			('A', 'B', 1), ('A', 'C', 1), ('B', 'D', 1), ('C', 'D', 1),
			('D', 'E', 2), ('D', 'F', 1), ('E', 'G', 1), ('F', 'G', 2),
			('A', 'G', 5), ('C', 'G', 9),
		];
		let distance = shortest_distances(&graph(&edges), 'A')[&'G'];
		assert_eq!(distance, 5);

		let paths = all_shortest_paths(&graph(&edges), 'A', &'G');
		assert_eq!(paths.len(), 5);
		let distinct = paths.iter().collect::<HashSet<_>>();
		assert_eq!(distinct.len(), paths.len());
		for path in &paths {
			assert_eq!(path.first(), Some(&'A'));
			assert_eq!(path.last(), Some(&'G'));
			assert_eq!(path_weight(&edges, path), distance);
		}
	}

	#[test]
	fn a_star() {
		let edges = undirected(DETOUR);
		let heuristic = |node: &char| match node { 'A' => 3, 'B' => 2, 'C' => 1, _ => 0 };
		assert_eq!(a_star_path(&graph(&edges), 'A', 'D', heuristic), Ok(vec!['A', 'B', 'C', 'D']));
		assert_eq!(a_star_path(&graph(&edges), 'D', 'A', |_| 0), Ok(vec!['D', 'C', 'B', 'A']));
		assert_eq!(a_star_path(&graph(DIAMOND), 'D', 'A', |_| 0),
			Err(NoPathBetween { start: 'D', end: 'A' }));
		assert_eq!(a_star_path(&graph(SELF_LOOP), 'A', 'A', |_| 0), Ok(vec!['A']));
	}

	#[test]
	fn unbounded_graph() {
		// Steps of +1 & ×2 over all integers; the search stops once the target is popped
		let graph = FnGraph::new(|&n: &u64| vec![n + 1, n * 2], |_, _| 1);
		assert_eq!(all_shortest_paths(&graph, 2, &10), [vec![2u64, 4, 5, 10]]);
		assert_eq!(a_star_path(&graph, 2, 10, |_| 0), Ok(vec![2, 4, 5, 10]));
	}
}

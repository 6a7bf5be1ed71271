use rand::Rng;
use crate::linked_list::{LinkedList, Node};

fn hand_built() -> LinkedList<&'static str> {
    let node2 = Node::new("2", None);
    let node1 = Node::new("fir", Some(node2));
    let mut ll = LinkedList::new();
    ll.set_head(node1);
    ll
}

#[test]
fn test1_new_list_is_empty() {
    let ll: LinkedList<i32> = LinkedList::new();

    assert_eq!(true, ll.is_empty());
    assert_eq!(0, ll.len());
    assert_eq!(None, ll.peek_head());
    assert_eq!(None, ll.peek_tail());
    assert_eq!(None, ll.iter().next());
}

#[test]
fn test2_set_head_installs_whole_chain() {
    let ll = hand_built();

    assert_eq!(2, ll.len());
    assert_eq!(Some(&"fir"), ll.peek_head());
    assert_eq!(Some(&"2"), ll.peek_tail());
    assert_eq!(vec!["fir", "2"], ll.iter().copied().collect::<Vec<_>>());
}

#[test]
fn test3_set_head_replaces_previous_chain() {
    let mut ll: LinkedList<i32> = (0..5).collect();
    ll.set_head(Node::new(7, Some(Node::new(8, None))));

    assert_eq!(2, ll.len());
    assert_eq!(vec![7, 8], ll.iter().copied().collect::<Vec<_>>());

    ll.insert_at_tail(9);
    assert_eq!(Some(&9), ll.peek_tail());
    assert_eq!(vec![7, 8, 9], ll.into_iter().collect::<Vec<_>>());
}

#[test]
fn test4_from_chain() {
    let ll = LinkedList::from_chain(Node::new('a', Some(Node::new('b', Some(Node::new('c', None))))));

    assert_eq!(3, ll.len());
    assert_eq!(Some(&'c'), ll.peek_tail());
    assert_eq!("a => b => c => None", ll.to_string());
}

#[test]
fn test5_insert_at_head_reverses_order() {
    let mut ll = LinkedList::new();
    for x in 1..=3 {
        ll.insert_at_head(x);
    }

    assert_eq!(vec![3, 2, 1], ll.iter().copied().collect::<Vec<_>>());
    assert_eq!(Some(&3), ll.peek_head());
    assert_eq!(Some(&1), ll.peek_tail());
}

#[test]
fn test6_insert_at_tail_keeps_order() {
    let mut ll = LinkedList::new();
    for x in 1..=3 {
        ll.insert_at_tail(x);
    }

    assert_eq!(vec![1, 2, 3], ll.iter().copied().collect::<Vec<_>>());
    assert_eq!(Some(&1), ll.peek_head());
    assert_eq!(Some(&3), ll.peek_tail());
}

#[test]
fn test7_mixed_inserts_track_tail() {
    let mut ll = hand_built();
    ll.insert_at_head("zero");
    ll.insert_at_tail("3");

    assert_eq!(4, ll.len());
    assert_eq!(Some(&"3"), ll.peek_tail());
    assert_eq!("zero => fir => 2 => 3 => None", ll.to_string());
}

#[test]
fn test8_pop_head() {
    let mut ll = hand_built();

    assert_eq!(Some("fir"), ll.pop_head());
    assert_eq!(Some("2"), ll.pop_head());
    assert_eq!(None, ll.pop_head());
    assert_eq!(true, ll.is_empty());
    assert_eq!(None, ll.peek_tail());
}

#[test]
fn test9_iter_mut() {
    let mut ll: LinkedList<i32> = (1..=4).collect();
    for x in ll.iter_mut() {
        *x *= 10;
    }

    assert_eq!(vec![10, 20, 30, 40], ll.iter().copied().collect::<Vec<_>>());
    assert_eq!(Some(&40), ll.peek_tail());
}

#[test]
fn test10_clear() {
    let mut ll: LinkedList<i32> = (0..10).collect();
    ll.clear();

    assert_eq!(true, ll.is_empty());
    assert_eq!(0, ll.len());
    assert_eq!(None, ll.peek_tail());

    ll.extend([4, 5]);
    assert_eq!(vec![4, 5], ll.iter().copied().collect::<Vec<_>>());
}

#[test]
fn test11_random_inserts_match_vec_deque() {
    let mut rng = rand::thread_rng();
    let mut ll = LinkedList::new();
    let mut expected = std::collections::VecDeque::new();

    for _ in 0..1000 {
        let value: u32 = rng.gen();
        match rng.gen_range(0..3) {
            0 => {
                ll.insert_at_head(value);
                expected.push_front(value);
            }
            1 => {
                ll.insert_at_tail(value);
                expected.push_back(value);
            }
            _ => {
                assert_eq!(expected.pop_front(), ll.pop_head());
            }
        }
        assert_eq!(expected.len(), ll.len());
        assert_eq!(expected.back(), ll.peek_tail());
    }

    assert_eq!(expected.into_iter().collect::<Vec<_>>(), ll.into_iter().collect::<Vec<_>>());
}

#[test]
fn test12_len_matches_traversal() {
    let ll: LinkedList<usize> = (0..257).collect();
    assert_eq!(ll.len(), ll.iter().count());
    assert_eq!(ll.len(), (&ll).into_iter().count());
}

#[test]
fn test13_hand_built_nodes_keep_their_data() {
    let node2 = Node::new(String::from("2"), None);
    assert_eq!("2", node2.data().as_str());

    let node1 = Node::new(String::from("fir"), Some(node2));
    assert_eq!("fir", node1.data().as_str());

    let ll = LinkedList::from_chain(node1);
    assert_eq!(vec!["fir", "2"], ll.iter().map(|s| s.as_str()).collect::<Vec<_>>());
}

use singly_linked::{logger, LinkedList, Node};

fn main() -> anyhow::Result<()> {
    logger::init();

    let node2 = Node::new("2", None);
    let node1 = Node::new("fir", Some(node2));

    let mut ll = LinkedList::new();
    ll.set_head(node1);
    ll.print()?;

    ll.insert_at_head("zero");
    ll.insert_at_tail("3");
    ll.print()?;

    LinkedList::<&str>::new().print()?;
    Ok(())
}

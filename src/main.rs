use linear_collections::collections::binary_tree::{BinarySearchTree, Order};
use linear_collections::collections::contiguous::{BoundedQueue, BoundedStack};
use linear_collections::collections::error::CollectionError;
use linear_collections::collections::linked::{
    CircularLinkedList, DoublyLinkedList, SinglyLinkedList,
};

fn main() -> Result<(), CollectionError> {
    println!("\n[BoundedStack]\n");

    let mut stack = BoundedStack::with_cap(3);
    for i in 1..=3 {
        stack.push(i)?;
    }
    println!("{stack}");
    if let Err(err) = stack.push(4) {
        println!("{err}");
    }
    stack.pop()?;
    println!("top: {}", stack.top()?);

    println!("\n[BoundedQueue]\n");

    let mut queue = BoundedQueue::with_cap(3);
    for i in 1..=3 {
        queue.enqueue(i)?;
    }
    queue.dequeue()?;
    queue.enqueue(4)?;
    println!("{queue}");
    println!("front: {}", queue.front()?);

    println!("\n[SinglyLinkedList]\n");

    let mut singly = SinglyLinkedList::new();
    singly.add_first(3);
    singly.add_first(1);
    singly.cursor_front_mut().insert_after(2);
    println!("{singly}");
    singly.remove_first();
    println!("{singly}");

    println!("\n[DoublyLinkedList]\n");

    let mut doubly = DoublyLinkedList::new();
    for i in 1..=3 {
        doubly.add_to_front(i);
    }
    println!("{doubly}");
    doubly.remove_from_back();
    println!("{doubly}");

    println!("\n[CircularLinkedList]\n");

    let mut ring = CircularLinkedList::new();
    for i in [10, 20, 30] {
        ring.append(i);
    }
    println!("{ring}");
    if let Err(err) = ring.remove(&99) {
        println!("{err}");
    }
    ring.remove(&20)?;
    println!("{ring}");

    println!("\n[BinarySearchTree]\n");

    let tree = BinarySearchTree::from_iter([5, 3, 7, 2, 4, 6, 8]);
    println!("Height of the binary tree is: {}", tree.height());
    println!("Number of leaves in the binary tree is: {}", tree.count_leaves());
    println!("Number of nodes in the binary tree is: {}", tree.count_nodes());
    println!("Maximum value in the binary tree is: {}", tree.find_max()?);
    for order in [Order::InOrder, Order::PreOrder, Order::PostOrder] {
        let values: Vec<_> = tree.traverse(order).map(ToString::to_string).collect();
        println!("{order:?}: {}", values.join(" "));
    }
    println!("{tree:?}");

    Ok(())
}

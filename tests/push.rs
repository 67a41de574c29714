use runnel::{
    multiplex::unsync::multiplex_array,
    push::{feed, Fanout, Filter, Target},
};

/// Counts what it is sent without keeping it.
#[derive(Default)]
struct Counter(usize);

impl<T> Target<T> for Counter {
    fn send(&mut self, _: T) {
        self.0 += 1;
    }
}

#[test]
fn fanout_to_filters() {
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut counter = Counter::default();
    {
        let mut fanout: Fanout<u32> = Fanout::new();
        fanout.push(Filter::new(|x: &u32| *x < 10, &mut small));
        fanout.push(Filter::new(|x: &u32| *x >= 10, &mut large));
        fanout.push(&mut counter);
        assert_eq!(fanout.len(), 3);
        feed([3, 14, 15, 9, 2, 65], &mut fanout);
    }
    assert_eq!(small, [3, 9, 2]);
    assert_eq!(large, [14, 15, 65]);
    assert_eq!(counter.0, 6);
}

#[test]
fn empty_fanout_discards() {
    let mut fanout: Fanout<String> = Fanout::default();
    assert!(fanout.is_empty());
    fanout.send("dropped".to_string());
}

#[test]
fn fanout_from_targets() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut fanout: Fanout<char> = [&mut first, &mut second].into_iter().collect();
    feed("hi".chars(), &mut fanout);
    drop(fanout);
    assert_eq!(first, ['h', 'i']);
    assert_eq!(second, ['h', 'i']);
}

#[test]
fn nested_filters() {
    let evens = Filter::new(|x: &i32| x % 2 == 0, Vec::new());
    let mut multiples_of_six = Filter::new(|x: &i32| x % 3 == 0, evens);
    feed(1..=20, &mut multiples_of_six);
    assert_eq!(multiples_of_six.into_inner().into_inner(), [6, 12, 18]);
}

#[test]
fn pull_copies_into_push_targets() {
    let [a, b] = multiplex_array("abc".chars());
    let mut through_box: Vec<char> = Vec::new();
    let mut collected = Vec::new();
    {
        let mut boxed: Box<dyn Target<char> + '_> = Box::new(&mut through_box);
        feed(a, &mut boxed);
    }
    feed(b, &mut collected);
    assert_eq!(through_box, ['a', 'b', 'c']);
    assert_eq!(collected, ['a', 'b', 'c']);
}

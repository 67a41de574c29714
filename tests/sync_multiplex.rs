use futures::StreamExt;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use runnel::{
    multiplex::sync::{multiplex, multiplex_array, Branch},
    SequenceExt,
};
use std::hash::Hasher;

static LENGTH: usize = 20_000;

fn source(seed: u64) -> impl Iterator<Item = i64> + Send {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..LENGTH).map(move |_| rng.gen())
}

fn expected_hash(seed: u64) -> u64 {
    let mut hasher = seahash::SeaHasher::new();
    for value in source(seed) {
        hasher.write_i64(value);
    }
    hasher.finish()
}

async fn read<I>(mut branch: Branch<I>) -> u64
where
    I: Iterator<Item = i64> + Send,
{
    let mut hasher = seahash::SeaHasher::new();
    let mut rng = SmallRng::from_entropy();
    loop {
        // read in uneven bursts, yielding between them so the copies interleave
        for _ in 0..rng.gen_range(1..64) {
            match StreamExt::next(&mut branch).await {
                Some(value) => hasher.write_i64(value),
                None => return hasher.finish(),
            }
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn copies_across_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();
    let read_hashes = multiplex(source(5), 8)
        .into_iter()
        .map(|branch| tokio::spawn(read(branch)))
        .collect::<Vec<_>>();

    let expected = expected_hash(5);
    for read_hash in futures::future::join_all(read_hashes).await {
        assert_eq!(read_hash.unwrap(), expected);
    }
}

#[tokio::test]
async fn dropped_copy_does_not_hold_buffer() {
    let [reader, idle] = multiplex_array(source(9));
    std::mem::drop(idle); // never read, so close it

    let reader = tokio::spawn(async move {
        let mut reader = reader;
        let mut max_buffered = 0;
        while StreamExt::next(&mut reader).await.is_some() {
            max_buffered = max_buffered.max(reader.buffered_len());
        }
        max_buffered
    });
    assert_eq!(reader.await.unwrap(), 0);
}

#[test]
fn copies_across_threads() {
    let copies = (0..1000u32).multiplex_sync(3);
    let handles: Vec<_> = copies
        .into_iter()
        .map(|branch| std::thread::spawn(move || branch.sum::<u32>()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (0..1000).sum());
    }
}

#[test]
fn diagnostics_alongside_stream_ext() {
    let [mut reader, idle] = multiplex_array(0..10);
    assert_eq!(reader.position(|x| x == 3), Some(3));
    assert_eq!(reader.next_index(), 4);
    assert_eq!(reader.buffered_len(), 4);
    assert_eq!(reader.buffered_range(), 0..4);

    drop(idle);
    assert_eq!(reader.buffered_len(), 0);
    assert_eq!(reader.pulled(), 4);
}

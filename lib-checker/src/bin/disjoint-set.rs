use disjoint_set::DisjointSet;
use proconio::input;

// Library Checker "Unionfind": t = 0 merges u and v, t = 1 asks whether
// u and v share a set.
fn main() {
    input! {
        n: usize,
        q: usize,
        queries: [(u8, usize, usize); q],
    }

    let mut ds = DisjointSet::new(n);
    for (t, u, v) in queries {
        match t {
            0 => {
                ds.union(u, v).unwrap();
            }
            1 => {
                if ds.is_same_set(u, v).unwrap() {
                    println!("1");
                } else {
                    println!("0");
                }
            }
            _ => unreachable!(),
        }
    }
}

// rayon-based shared-memory parallelism

use crate::error::KError;

/// Pool that runs every parallel piece of one solve.
///
/// `workers` is the number of partial sums each squared norm is split into.
/// The backing rayon pool gets `min(workers, num_cpus)` threads and is dropped,
/// along with all its threads, when the pool goes out of scope.
pub struct WorkerPool {
    workers: usize,
    #[cfg(feature = "rayon")]
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Result<Self, KError> {
        let workers = workers.max(1);
        #[cfg(feature = "rayon")]
        {
            let threads = workers.min(num_cpus::get()).max(1);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .thread_name(|i| format!("kaczmarz-worker-{i}"))
                .build()
                .map_err(|e| KError::WorkerPool(e.to_string()))?;
            Ok(Self { workers, pool })
        }
        #[cfg(not(feature = "rayon"))]
        {
            Ok(Self { workers })
        }
    }

    /// Chunk count for squared norms.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Threads actually backing the pool.
    pub fn threads(&self) -> usize {
        #[cfg(feature = "rayon")]
        {
            self.pool.current_num_threads()
        }
        #[cfg(not(feature = "rayon"))]
        {
            1
        }
    }

    /// Run `op` with this pool as the target of all nested parallel work.
    pub fn install<R, F>(&self, op: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        #[cfg(feature = "rayon")]
        {
            self.pool.install(op)
        }
        #[cfg(not(feature = "rayon"))]
        {
            op()
        }
    }
}

/// Fan out two independent computations and wait for both.
pub fn join<A, B, RA, RB>(a: A, b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "rayon")]
    {
        rayon::join(a, b)
    }
    #[cfg(not(feature = "rayon"))]
    {
        (a(), b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_threads_never_exceed_workers() {
        let pool = WorkerPool::new(1).unwrap();
        assert_eq!(pool.workers(), 1);
        assert_eq!(pool.threads(), 1);
        let pool = WorkerPool::new(0).unwrap();
        assert_eq!(pool.workers(), 1);
    }

    #[test]
    fn join_returns_both_sides() {
        let pool = WorkerPool::new(4).unwrap();
        let (a, b) = pool.install(|| join(|| 2 + 2, || "four"));
        assert_eq!(a, 4);
        assert_eq!(b, "four");
    }
}

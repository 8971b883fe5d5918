pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Crypto Dashboard</title>
    <script src="https://unpkg.com/lightweight-charts@4.1.3/dist/lightweight-charts.standalone.production.js"></script>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #0e1117;
            color: #fafafa;
            display: flex;
            min-height: 100vh;
        }
        nav {
            width: 220px;
            background: #262730;
            padding: 24px 16px;
        }
        nav h2 { font-size: 16px; margin-bottom: 16px; }
        nav label { display: block; padding: 6px 0; cursor: pointer; }
        main { flex: 1; padding: 32px 48px; }
        h1 { font-size: 32px; margin-bottom: 8px; }
        h2.section {
            margin: 24px 0 8px;
            padding-bottom: 6px;
            border-bottom: 2px solid;
            border-image: linear-gradient(90deg, red, orange, yellow, green, blue, violet) 1;
        }
        a { color: #7aa2f7; }
        .muted { color: #8b8d98; font-size: 14px; }
        .buttons { margin: 16px 0; }
        button {
            background: #262730;
            color: #fafafa;
            border: 1px solid #4a4c57;
            border-radius: 6px;
            padding: 6px 14px;
            margin-right: 8px;
            cursor: pointer;
        }
        button.primary { background: #ff4b4b; border-color: #ff4b4b; }
        .row { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; margin: 16px 0; }
        .card { padding: 12px 0; border-bottom: 1px solid #31333f; }
        .card img { width: 70px; height: 70px; }
        .metric-label { color: #7aa2f7; font-size: 14px; }
        .metric-value { font-size: 28px; margin: 4px 0; }
        .up { color: #09ab3b; }
        .down { color: #ff2b2b; }
        .metrics { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin: 16px 0; }
        .info { background: #1c2f4a; color: #c7d9f5; padding: 12px 16px; border-radius: 6px; margin: 12px 0; }
        .error { background: #3e1f24; color: #ffb3b3; padding: 12px 16px; border-radius: 6px; margin: 12px 0; }
        select { background: #262730; color: #fafafa; border: 1px solid #4a4c57; padding: 6px; min-width: 240px; }
        #chart { height: 320px; margin-top: 16px; }
        .hidden { display: none; }
    </style>
</head>
<body>
    <nav>
        <h2>Page Navigation</h2>
        <label><input type="radio" name="page" value="dashboard" checked> Dashboard</label>
        <label><input type="radio" name="page" value="search"> Search</label>
    </nav>
    <main>
        <div id="error" class="error hidden"></div>

        <section id="dashboard-page">
            <h1>Cryptoeconomy Dashboard &#128200;</h1>
            <p>A simple cryptocurrency dashboard to explore the cryptoeconomy
               <em>via <a href="https://coinlayer.com/">coinlayer API</a></em></p>
            <h2 class="section">Market Overview</h2>
            <p class="muted" id="updated"></p>
            <div class="buttons">
                <button id="default-btn">Default &#127968;</button>
                <button id="random-btn">Random &#127922;</button>
            </div>
            <div id="rows"></div>
        </section>

        <section id="search-page" class="hidden">
            <h1>Explore the Cryptoeconomy! &#128184;</h1>
            <p class="muted">Enter a crypto symbol, i.e. BTC, ETH, DOGE and etc.</p>
            <div class="buttons">
                <select id="symbol"><option value="">Search for an asset</option></select>
                <button class="primary" id="search-btn">SEARCH</button>
            </div>
            <div id="result"></div>
            <div id="chart"></div>
        </section>
    </main>

    <script>
        let chart = null;
        let namesLoaded = false;

        function showError(message) {
            const el = document.getElementById('error');
            el.textContent = message;
            el.classList.toggle('hidden', !message);
        }

        async function fetchJson(url) {
            const response = await fetch(url);
            const body = await response.json();
            if (!response.ok) {
                throw new Error(body.error || response.statusText);
            }
            return body;
        }

        function deltaHtml(crypto) {
            const cls = crypto.rising ? 'up' : 'down';
            const arrow = crypto.rising ? '&#9650;' : '&#9660;';
            return `<span class="${cls}">${arrow} ${crypto.delta}</span>`;
        }

        function metric(label, value, delta) {
            return `<div>
                <div class="metric-label">${label}</div>
                <div class="metric-value">${value}</div>
                ${delta || ''}
            </div>`;
        }

        function overviewCard(crypto) {
            return `<div class="card">
                <h3>${crypto.symbol}</h3>
                <img src="${crypto.icon}" alt="${crypto.symbol}">
                ${metric(crypto.pair_label, crypto.rate, deltaHtml(crypto))}
            </div>`;
        }

        async function loadDashboard(mode) {
            showError('');
            try {
                const data = await fetchJson(`/api/dashboard?mode=${mode}`);
                document.getElementById('updated').textContent = `Last updated: ${data.updated_at}`;
                document.getElementById('rows').innerHTML = data.rows
                    .map(row => `<div class="row">${row.map(overviewCard).join('')}</div>`)
                    .join('');
            } catch (err) {
                showError(err.message);
            }
        }

        async function loadNames() {
            if (namesLoaded) return;
            try {
                const names = await fetchJson('/api/names');
                const select = document.getElementById('symbol');
                for (const name of names) {
                    const option = document.createElement('option');
                    option.value = name;
                    option.textContent = name;
                    select.appendChild(option);
                }
                namesLoaded = true;
            } catch (err) {
                showError(err.message);
            }
        }

        function renderChart(history) {
            const container = document.getElementById('chart');
            if (chart) {
                chart.remove();
                chart = null;
            }
            if (!history.length) return;

            chart = LightweightCharts.createChart(container, {
                layout: { background: { color: '#0e1117' }, textColor: '#fafafa' },
                grid: { vertLines: { color: '#262730' }, horzLines: { color: '#262730' } },
                width: container.clientWidth,
                height: 320,
            });
            const series = chart.addLineSeries({ color: '#ffaa00', lineWidth: 2 });
            series.setData(history.map(p => ({ time: p.date, value: p.rate })));
            chart.timeScale().fitContent();
        }

        async function search() {
            const symbol = document.getElementById('symbol').value;
            if (!symbol) return;
            showError('');
            try {
                const crypto = await fetchJson(`/api/crypto?symbol=${encodeURIComponent(symbol)}`);
                let html = `<h2 class="section" style="color: violet">${crypto.symbol}</h2>
                    <h3>Market Stats</h3>
                    <img src="${crypto.icon}" alt="${crypto.symbol}" width="100">`;
                if (crypto.notice) {
                    html += `<div class="info">&#8505;&#65039; ${crypto.notice}</div>`;
                    html += metric(crypto.pair_label, crypto.rate, deltaHtml(crypto));
                } else {
                    html += `<div class="metrics">
                        ${metric(crypto.pair_label, crypto.rate, deltaHtml(crypto))}
                        ${metric('HIGH / LOW', crypto.high_low)}
                        ${metric('MARKET VOLUME(24H)', crypto.volume)}
                        ${metric('MARKET CAP', crypto.market_cap)}
                    </div>`;
                }
                document.getElementById('result').innerHTML = html;
                renderChart(crypto.history);
            } catch (err) {
                showError(err.message);
            }
        }

        function showPage(page) {
            document.getElementById('dashboard-page').classList.toggle('hidden', page !== 'dashboard');
            document.getElementById('search-page').classList.toggle('hidden', page !== 'search');
            if (page === 'search') loadNames();
        }

        document.querySelectorAll('input[name="page"]').forEach(radio =>
            radio.addEventListener('change', e => showPage(e.target.value)));
        document.getElementById('default-btn').addEventListener('click', () => loadDashboard('default'));
        document.getElementById('random-btn').addEventListener('click', () => loadDashboard('random'));
        document.getElementById('search-btn').addEventListener('click', search);

        window.onload = () => loadDashboard('default');
    </script>
</body>
</html>"##;
